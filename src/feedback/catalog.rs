//! Static option catalogs

/// Showroom locations offered on the showroom step, in display order
pub const SHOWROOM_LOCATIONS: &[&str] = &[
    "Anna Nagar",
    "Puducherry",
    "Vellore",
    "Hosur",
    "Trichy",
    "Salem",
    "Erode",
    "Coimbatore",
    "Experience Center",
    "Pollachi",
    "Udumalpet",
    "Madurai",
    "Ramnad",
];

/// Number of columns the showroom radio grid is laid out in
pub const SHOWROOM_GRID_COLUMNS: usize = 2;
