pub mod jsonwebtoken_repository;
