pub mod fake_go;
pub mod mocks;
