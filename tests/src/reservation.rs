mod pricing;
mod scenario;
