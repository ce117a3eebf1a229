mod clip;
mod id_macro;

pub use clip::ClipId;
