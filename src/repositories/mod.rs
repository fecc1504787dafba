pub mod soil_reading;

pub use soil_reading::SoilReadingRepository;
