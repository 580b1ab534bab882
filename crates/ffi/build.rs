use std::env;
use std::path::PathBuf;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let output_file = PathBuf::from(&crate_dir)
        .join("../../Cyclone.h")
        .display()
        .to_string();

    let mut config = cbindgen::Config::from_file(PathBuf::from(&crate_dir).join("cbindgen.toml"))
        .expect("Unable to read cbindgen.toml");

    // CycloneReal is cfg-selected in Rust; C gets the single typedef matching this build
    let real = if env::var_os("CARGO_FEATURE_DOUBLE_PRECISION").is_some() {
        "double"
    } else {
        "float"
    };
    config.after_includes = Some(format!("\ntypedef {real} CycloneReal;\n"));

    // Generate C bindings using cbindgen
    cbindgen::Builder::new()
        .with_config(config)
        .with_crate(crate_dir)
        .generate()
        .expect("Unable to generate C bindings")
        .write_to_file(output_file);

    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=cbindgen.toml");
}
