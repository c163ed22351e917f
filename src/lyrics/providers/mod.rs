mod local;

pub use local::LocalProvider;
