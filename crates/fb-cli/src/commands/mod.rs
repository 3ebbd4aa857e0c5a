pub mod admin;
pub mod article;
pub mod auth;
pub mod contact;
pub mod dispatch;
pub mod project;
pub mod shared;
pub mod subscribe;
pub mod tiers;
