pub mod entities;
pub mod repository;

pub use entities::Reservation;
pub use repository::ReservationRepository;
