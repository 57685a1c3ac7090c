mod maxmind_adapter;
mod static_adapter;

pub use maxmind_adapter::MaxMindAdapter;
pub use static_adapter::StaticAdapter;
