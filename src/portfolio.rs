use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Development,
    Design,
}

impl Category {
    pub fn slug(self) -> &'static str {
        match self {
            Self::Development => "desenvolvimento",
            Self::Design => "design",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// The active selection of the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const OPTIONS: [CategoryFilter; 3] = [
        Self::All,
        Self::Only(Category::Development),
        Self::Only(Category::Design),
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.slug(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Todos",
            Self::Only(Category::Development) => "Desenvolvimento",
            Self::Only(Category::Design) => "Design",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown project category: {0}")]
pub struct ParseCategoryError(String);

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::OPTIONS
            .into_iter()
            .find(|f| f.slug() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-commerce Platform",
        category: Category::Development,
        description: "Plataforma completa de e-commerce com React, TypeScript e integração de pagamentos.",
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=600&h=400&fit=crop",
        technologies: &["React", "TypeScript", "Node.js", "MongoDB"],
        live_url: "https://github.com/alexandregarcia7k",
        github_url: "https://github.com/alexandregarcia7k",
    },
    Project {
        id: 2,
        title: "Dashboard Analytics",
        category: Category::Development,
        description: "Dashboard responsivo para análise de dados com gráficos interativos e tempo real.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop",
        technologies: &["React", "Tailwind CSS", "Firebase"],
        live_url: "https://github.com/alexandregarcia7k",
        github_url: "https://github.com/alexandregarcia7k",
    },
    Project {
        id: 5,
        title: "Landing Page - SaaS",
        category: Category::Development,
        description: "Landing page de alta conversão para produto SaaS com animações e otimização SEO.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600&h=400&fit=crop",
        technologies: &["Next.js", "Framer Motion", "Tailwind CSS"],
        live_url: "https://github.com/alexandregarcia7k",
        github_url: "https://github.com/alexandregarcia7k",
    },
];

/// Order-preserving selection of the projects the filter lets through.
pub fn filter(projects: &[Project], active: CategoryFilter) -> Vec<&Project> {
    projects.iter().filter(|p| active.matches(p)).collect()
}
