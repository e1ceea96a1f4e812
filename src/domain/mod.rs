// Domain layer: machine entities, tray addressing and the ports the machine depends on.

pub mod model;
pub mod ports;
pub mod symbol;
