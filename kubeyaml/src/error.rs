#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("incorrect number of arguments ({0}), see --help for usage instructions")]
    InvalidArgumentCount(usize),

    #[error("DecodeError: {0}")]
    Decode(serde_yaml::Error),

    #[error("EncodeError: {0}")]
    Encode(serde_yaml::Error),

    #[error("IoError: failed to write output")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
