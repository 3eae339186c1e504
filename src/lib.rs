pub mod api_client;
pub mod catalog;
pub mod configuration;
pub mod contact_form;
pub mod domain;
pub mod email_client;
pub mod mail_dispatch;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod util;
