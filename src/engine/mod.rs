pub mod challenges;
pub mod classifier;
pub mod insights;
pub mod market;
pub mod onboarding;
pub mod portfolio;
