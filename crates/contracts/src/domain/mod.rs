pub mod a001_category;
pub mod a002_service;
pub mod a003_department;
pub mod a004_designation;
pub mod a005_staff;
pub mod a006_customer;
pub mod a007_on_call;
pub mod common;
