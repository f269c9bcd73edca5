//! Bundles `assets/css/main.css` and its `@import`ed partials into a single
//! minified `assets/dist/bundle.css`, which the app links through `asset!`.

use std::error::Error;
use std::fs;
use std::path::Path;

use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
    targets::{Browsers, Targets},
};

const ENTRY: &str = "assets/css/main.css";
const OUT_DIR: &str = "assets/dist";
const OUT_FILE: &str = "assets/dist/bundle.css";

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=assets/css/");

    fs::create_dir_all(OUT_DIR)?;

    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());
    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .map_err(|err| format!("failed to bundle {ENTRY}: {err}"))?;

    // Vendor-prefix `backdrop-filter` and friends for older Safari
    let targets = Targets::from(Browsers {
        safari: Some(14 << 16),
        ..Browsers::default()
    });

    stylesheet
        .minify(MinifyOptions {
            targets,
            ..MinifyOptions::default()
        })
        .map_err(|err| format!("failed to minify CSS: {err}"))?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            targets,
            ..PrinterOptions::default()
        })
        .map_err(|err| format!("failed to print CSS: {err}"))?;

    fs::write(OUT_FILE, css.code)?;
    Ok(())
}
