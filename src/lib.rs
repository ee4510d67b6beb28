pub mod audio;
pub mod compute;
pub mod entities;
pub mod geom;
