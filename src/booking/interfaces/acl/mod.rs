pub mod availability_authority_facade;
