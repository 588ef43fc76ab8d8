pub mod entities;
pub mod normalizer;
pub mod ports;
pub mod predicate;
pub mod query;
pub mod result_mapper;
pub mod services;
pub mod size_range;
pub mod value_objects;

#[cfg(test)]
pub(crate) mod test_support;
