#[cfg(test)]
mod common;

#[cfg(test)]
mod login_flow_tests;

#[cfg(test)]
mod registration_flow_tests;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod catalog_tests;
