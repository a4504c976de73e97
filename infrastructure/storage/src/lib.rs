mod local;

pub use local::LocalPhotoStorage;
