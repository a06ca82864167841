use std::path::PathBuf;
use std::{env, fs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=../proto/contextengine.proto");
    fs::create_dir("src/pb").unwrap_or(());

    let descriptor_path =
        PathBuf::from(env::var("OUT_DIR")?).join("contextengine_descriptor.bin");

    tonic_build::configure()
        .file_descriptor_set_path(descriptor_path)
        .build_client(false)
        .build_server(true)
        .out_dir("src/pb")
        .include_file("mod.rs")
        .compile(&["../proto/contextengine.proto"], &["../proto"])
        .unwrap_or_else(|e| panic!("protobuf compilation failed: {e}"));

    Ok(())
}
