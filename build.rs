fn main() {
    let proto_file = "./proto/auction.proto";

    // Server codegen stays on: the integration tests run a mock Auction service.
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile(&[proto_file], &["proto"])
        .unwrap_or_else(|e| panic!("protobuf compile error: {}", e));

    println!("cargo:rerun-if-changed={}", proto_file);
}
