//! Fixed outbound links: email, phone, click-to-chat and social profiles.

use crate::contact::{encode_uri_component, RECIPIENT};

pub const OWNER: &str = "Alexandre";
pub const EMAIL: &str = RECIPIENT;
pub const PHONE_DISPLAY: &str = "(35) 99755-2367";
pub const PHONE_INTERNATIONAL: &str = "+55 (35) 99755-2367";
pub const LOCATION: &str = "Minas Gerais, Brasil";

const WHATSAPP_NUMBER: &str = "5535997552367";
const WHATSAPP_GREETING: &str = "Olá Alexandre, vim pelo seu portfólio!";

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

/// Deep link that opens a chat with the greeting already typed in.
pub fn whatsapp_link() -> String {
    format!(
        "https://wa.me/{WHATSAPP_NUMBER}?text={}",
        encode_uri_component(WHATSAPP_GREETING)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialProfile {
    pub name: &'static str,
    pub url: &'static str,
    pub username: &'static str,
}

pub const GITHUB: SocialProfile = SocialProfile {
    name: "GitHub",
    url: "https://github.com/alexandregarcia7k",
    username: "@alexandregarcia7k",
};

pub const LINKEDIN: SocialProfile = SocialProfile {
    name: "LinkedIn",
    url: "https://www.linkedin.com/in/alexandregarcia7k",
    username: "Alexandre Garcia",
};

pub const INSTAGRAM: SocialProfile = SocialProfile {
    name: "Instagram",
    url: "https://www.instagram.com/alexandre.garcia7k",
    username: "@alexandre.garcia7k",
};

pub const SOCIAL_PROFILES: [SocialProfile; 3] = [GITHUB, LINKEDIN, INSTAGRAM];

/// An entry in the contact card list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub href: String,
    pub new_tab: bool,
}

pub fn contact_channels() -> Vec<ContactChannel> {
    vec![
        ContactChannel {
            title: "Email",
            value: EMAIL,
            href: mailto(),
            new_tab: false,
        },
        ContactChannel {
            title: "WhatsApp",
            value: PHONE_DISPLAY,
            href: whatsapp_link(),
            new_tab: true,
        },
        ContactChannel {
            title: "Localização",
            value: LOCATION,
            href: "#".to_string(),
            new_tab: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_link_encodes_greeting() {
        assert_eq!(
            whatsapp_link(),
            "https://wa.me/5535997552367?text=Ol%C3%A1%20Alexandre%2C%20vim%20pelo%20seu%20portf%C3%B3lio!"
        );
    }

    #[test]
    fn test_contact_channels() {
        let channels = contact_channels();
        let titles: Vec<_> = channels.iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Email", "WhatsApp", "Localização"]);
        assert_eq!(channels[0].href, "mailto:alexandregarciassj@outlook.com");
        assert!(channels[1].new_tab);
        assert!(channels[1].href.starts_with("https://wa.me/"));
    }

    #[test]
    fn test_social_profiles_are_https() {
        for profile in SOCIAL_PROFILES {
            assert!(profile.url.starts_with("https://"), "{}", profile.name);
        }
    }
}
