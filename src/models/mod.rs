/// Rows of `amm_cost_of_attack_data`
pub mod attack_data;
