pub struct Region {
    pub name: &'static str,
    pub countries: &'static [&'static str],
}

pub static REGIONS: [Region; 6] = [
    Region {
        name: "Asia Pacific",
        countries: &[
            "Afghanistan",
            "Pakistan",
            "Iran",
            "Tajikstan",
            "Uzbakistan",
            "China",
            "Japan",
            "South Korea",
            "Australia",
            "Singapore",
            "India",
        ],
    },
    Region {
        name: "North America",
        countries: &["United States", "Canada", "Mexico"],
    },
    Region {
        name: "Europe",
        countries: &["United Kingdom", "Germany", "France", "Italy", "Spain", "Netherlands"],
    },
    Region {
        name: "South America",
        countries: &["Brazil", "Argentina", "Chile", "Colombia"],
    },
    Region {
        name: "Middle East",
        countries: &["UAE", "Saudi Arabia", "Israel", "Qatar"],
    },
    Region {
        name: "Africa",
        countries: &["South Africa", "Egypt", "Nigeria", "Kenya"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopularRoute {
    pub from: &'static str,
    pub to: &'static str,
    pub available: bool,
}

pub const POPULAR_ROUTES: [PopularRoute; 5] = [
    PopularRoute {
        from: "Afghanistan",
        to: "Pakistan",
        available: true,
    },
    PopularRoute {
        from: "Afghanistan",
        to: "Germany",
        available: true,
    },
    PopularRoute {
        from: "Afghanistan",
        to: "United States",
        available: true,
    },
    PopularRoute {
        from: "Pakistan",
        to: "Portugal",
        available: false,
    },
    PopularRoute {
        from: "Brazil",
        to: "Portugal",
        available: false,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAvailability {
    /// One side of the route is still blank.
    Incomplete,
    Available,
    Unavailable,
}

pub fn region_of(country: &str) -> Option<&'static Region> {
    let needle = country.trim();
    REGIONS.iter().find(|region| {
        region
            .countries
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(needle))
    })
}

pub fn all_countries() -> impl Iterator<Item = &'static str> {
    REGIONS.iter().flat_map(|region| region.countries.iter().copied())
}

/// A route is served when both ends sit inside one of the served regions.
pub fn check_route(from: &str, to: &str) -> RouteAvailability {
    if from.trim().is_empty() || to.trim().is_empty() {
        return RouteAvailability::Incomplete;
    }
    if region_of(from).is_some() && region_of(to).is_some() {
        RouteAvailability::Available
    } else {
        RouteAvailability::Unavailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_side_is_incomplete() {
        assert_eq!(check_route("", "Germany"), RouteAvailability::Incomplete);
        assert_eq!(check_route("Afghanistan", "  "), RouteAvailability::Incomplete);
    }

    #[test]
    fn served_regions_are_available() {
        assert_eq!(check_route("Afghanistan", "Germany"), RouteAvailability::Available);
        assert_eq!(check_route(" kenya ", "QATAR"), RouteAvailability::Available);
    }

    #[test]
    fn unknown_country_is_unavailable() {
        assert_eq!(check_route("Brazil", "Portugal"), RouteAvailability::Unavailable);
    }

    #[test]
    fn popular_routes_agree_with_region_table() {
        for route in POPULAR_ROUTES {
            let expected = if route.available {
                RouteAvailability::Available
            } else {
                RouteAvailability::Unavailable
            };
            assert_eq!(check_route(route.from, route.to), expected, "{route:?}");
        }
    }

    #[test]
    fn country_listing() {
        assert_eq!(all_countries().count(), 32);
        assert_eq!(region_of("Japan").map(|region| region.name), Some("Asia Pacific"));
        assert!(region_of("Atlantis").is_none());
    }
}
