fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Compile zone facade proto
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/zones.proto"], &["proto/"])?;

    // Compile species facade proto
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/species.proto"], &["proto/"])?;

    Ok(())
}
