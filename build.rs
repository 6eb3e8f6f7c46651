//! Build script for the Rejuvana Living site
//!
//! With the `ui` feature the binary embeds `ui/dist`. This script checks that
//! `trunk` is installed and that the bundle has been built, warning otherwise.
//! A binary built without the bundle still runs and answers 503 for pages.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    #[cfg(feature = "ui")]
    {
        println!("cargo:rerun-if-changed=ui/dist/");
        println!("cargo:rerun-if-changed=ui/src/");
        println!("cargo:rerun-if-changed=ui/index.html");
        println!("cargo:rerun-if-changed=ui/Cargo.toml");
        check_ui_bundle();
    }
}

#[cfg(feature = "ui")]
fn check_ui_bundle() {
    use std::process::Command;

    let trunk = Command::new("trunk")
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string());

    match &trunk {
        Some(version) => println!("cargo:warning=Rejuvana UI: found {}", version),
        None => {
            println!("cargo:warning=");
            println!("cargo:warning=╔══════════════════════════════════════════════════════════════╗");
            println!("cargo:warning=║  WARNING: trunk not found                                    ║");
            println!("cargo:warning=║                                                              ║");
            println!("cargo:warning=║  The site bundle is built with trunk:                        ║");
            println!("cargo:warning=║    cargo install trunk                                       ║");
            println!("cargo:warning=║    rustup target add wasm32-unknown-unknown                  ║");
            println!("cargo:warning=╚══════════════════════════════════════════════════════════════╝");
            println!("cargo:warning=");
        }
    }

    let ui_dist = std::path::Path::new("ui/dist");
    if !ui_dist.join("index.html").exists() {
        println!("cargo:warning=");
        println!("cargo:warning=╔══════════════════════════════════════════════════════════════╗");
        println!("cargo:warning=║  WARNING: UI assets not found in ui/dist/                    ║");
        println!("cargo:warning=║                                                              ║");
        println!("cargo:warning=║  Build the site before compiling with --features ui:         ║");
        println!("cargo:warning=║    cd ui && trunk build --release                            ║");
        println!("cargo:warning=║                                                              ║");
        println!("cargo:warning=║  Secrets are read at bundle build time:                      ║");
        println!("cargo:warning=║    GEMINI_API_KEY, REACH_API_TOKEN                           ║");
        println!("cargo:warning=╚══════════════════════════════════════════════════════════════╝");
        println!("cargo:warning=");
    }
}
