mod contract;
mod schema;
