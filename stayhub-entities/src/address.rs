#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Address {
    pub street  : Option<String>,
    pub city    : Option<String>,
    pub state   : Option<String>,
    pub country : Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        let Self {
            street,
            city,
            state,
            country,
        } = self;
        street.is_none() && city.is_none() && state.is_none() && country.is_none()
    }
}
