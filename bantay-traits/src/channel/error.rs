pub trait ChannelError: std::error::Error + Send + Sync {}

impl<T: std::error::Error + Send + Sync> ChannelError for T {}
