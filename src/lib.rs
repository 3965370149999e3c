pub mod auction {
    tonic::include_proto!("auction");
}

pub mod command;
pub mod console;
pub mod error;
pub mod event;
pub mod output;
pub mod stream;
