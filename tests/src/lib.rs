#[cfg(test)]
mod data;
#[cfg(test)]
mod pipeline;
#[cfg(test)]
mod texts;
