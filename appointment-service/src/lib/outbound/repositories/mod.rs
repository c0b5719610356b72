pub mod appointment;
pub mod doctor;
pub mod user;

pub use appointment::PostgresAppointmentRepository;
pub use doctor::PostgresDoctorRepository;
pub use user::PostgresUserRepository;
