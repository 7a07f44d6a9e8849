pub mod consumers;
pub mod delivery_routes;
pub mod orders;
pub mod products;
