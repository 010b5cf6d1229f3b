mod attack_data_service;

pub use attack_data_service::AttackDataService;
