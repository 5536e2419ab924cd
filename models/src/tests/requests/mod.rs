mod serialization;
mod stk_push_builder;
