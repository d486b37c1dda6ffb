//! Инфраструктурный слой вокруг движка слотов:
//! - RNG-реализации для engine;
//! - воспроизводимые seed'ы для реплея;
//! - генерация ID;
//! - маппинги между domain и DTO.

pub mod ids;
pub mod mapping;
pub mod rng;
pub mod rng_seed;

pub use ids::*;
pub use mapping::*;
pub use rng::*;
pub use rng_seed::RngSeed;
