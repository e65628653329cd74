pub mod carrier;
pub mod entity;
pub mod shipping_method;
pub mod tax_class;
