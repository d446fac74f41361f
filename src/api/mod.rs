pub mod absensi;
pub mod export;
pub mod health;
pub mod pages;
