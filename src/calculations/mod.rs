pub(crate) mod backward_pass;
pub(crate) mod forward_pass;
