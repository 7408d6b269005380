pub mod dataset_repository_impl;
