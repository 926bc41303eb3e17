mod observability;
mod qa;
