use chrono::Datelike;

fn main() {
    // Year shown in the footer copyright line
    let build_year = chrono::Utc::now().year();
    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
