pub mod audio;
pub mod cards;
pub mod export;
pub mod playback;
pub mod quiz;
pub mod status;
