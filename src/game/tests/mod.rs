pub mod common;

#[cfg(test)]
mod test_pitch;



#[cfg(test)]
mod test_baserunning;
