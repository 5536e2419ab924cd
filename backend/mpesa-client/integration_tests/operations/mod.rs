mod c2b;
mod payments;
mod queries;
