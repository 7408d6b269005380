pub mod dataset_repository;
