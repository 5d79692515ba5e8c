pub mod appointment_repository;
