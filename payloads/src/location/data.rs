use super::{City, Country, State};

pub(super) static COUNTRIES: &[Country] = &[
    Country {
        iso_code: "AU",
        name: "Australia",
    },
    Country {
        iso_code: "CA",
        name: "Canada",
    },
    Country {
        iso_code: "FR",
        name: "France",
    },
    Country {
        iso_code: "DE",
        name: "Germany",
    },
    Country {
        iso_code: "IN",
        name: "India",
    },
    Country {
        iso_code: "JP",
        name: "Japan",
    },
    Country {
        iso_code: "KE",
        name: "Kenya",
    },
    Country {
        iso_code: "GB",
        name: "United Kingdom",
    },
    Country {
        iso_code: "US",
        name: "United States",
    },
    Country {
        iso_code: "VA",
        name: "Vatican City",
    },
];

const fn state(
    country_code: &'static str,
    iso_code: &'static str,
    name: &'static str,
) -> State {
    State {
        iso_code,
        name,
        country_code,
    }
}

const fn city(
    country_code: &'static str,
    state_code: &'static str,
    name: &'static str,
) -> City {
    City {
        name,
        state_code,
        country_code,
    }
}

pub(super) static STATES: &[State] = &[
    state("AU", "NSW", "New South Wales"),
    state("AU", "QLD", "Queensland"),
    state("AU", "VIC", "Victoria"),
    state("AU", "WA", "Western Australia"),
    state("CA", "BC", "British Columbia"),
    state("CA", "ON", "Ontario"),
    state("CA", "QC", "Quebec"),
    state("FR", "IDF", "Ile-de-France"),
    state("FR", "PAC", "Provence-Alpes-Cote d'Azur"),
    state("FR", "ARA", "Auvergne-Rhone-Alpes"),
    state("DE", "BE", "Berlin"),
    state("DE", "BY", "Bavaria"),
    state("DE", "HH", "Hamburg"),
    state("IN", "GA", "Goa"),
    state("IN", "KA", "Karnataka"),
    state("IN", "MH", "Maharashtra"),
    state("IN", "RJ", "Rajasthan"),
    state("JP", "13", "Tokyo"),
    state("JP", "26", "Kyoto"),
    state("JP", "27", "Osaka"),
    state("JP", "01", "Hokkaido"),
    state("KE", "30", "Nairobi City"),
    state("KE", "28", "Mombasa"),
    state("KE", "14", "Kilifi"),
    state("KE", "22", "Kisumu"),
    state("GB", "ENG", "England"),
    state("GB", "SCT", "Scotland"),
    state("GB", "WLS", "Wales"),
    state("US", "CA", "California"),
    state("US", "FL", "Florida"),
    state("US", "NY", "New York"),
    state("US", "WA", "Washington"),
    state("US", "HI", "Hawaii"),
];

pub(super) static CITIES: &[City] = &[
    city("AU", "NSW", "Sydney"),
    city("AU", "NSW", "Newcastle"),
    city("AU", "NSW", "Wollongong"),
    city("AU", "QLD", "Brisbane"),
    city("AU", "QLD", "Gold Coast"),
    city("AU", "QLD", "Cairns"),
    city("AU", "VIC", "Melbourne"),
    city("AU", "VIC", "Geelong"),
    city("AU", "WA", "Perth"),
    city("AU", "WA", "Broome"),
    city("CA", "BC", "Vancouver"),
    city("CA", "BC", "Victoria"),
    city("CA", "BC", "Whistler"),
    city("CA", "ON", "Toronto"),
    city("CA", "ON", "Ottawa"),
    city("CA", "ON", "Niagara Falls"),
    city("CA", "QC", "Montreal"),
    city("CA", "QC", "Quebec City"),
    city("FR", "IDF", "Paris"),
    city("FR", "IDF", "Versailles"),
    city("FR", "PAC", "Nice"),
    city("FR", "PAC", "Marseille"),
    city("FR", "PAC", "Cannes"),
    city("FR", "ARA", "Lyon"),
    city("FR", "ARA", "Chamonix"),
    city("DE", "BE", "Berlin"),
    city("DE", "BY", "Munich"),
    city("DE", "BY", "Nuremberg"),
    city("DE", "HH", "Hamburg"),
    city("IN", "GA", "Panaji"),
    city("IN", "GA", "Margao"),
    city("IN", "KA", "Bengaluru"),
    city("IN", "KA", "Mysuru"),
    city("IN", "MH", "Mumbai"),
    city("IN", "MH", "Pune"),
    city("IN", "RJ", "Jaipur"),
    city("IN", "RJ", "Udaipur"),
    city("IN", "RJ", "Jodhpur"),
    city("JP", "13", "Tokyo"),
    city("JP", "13", "Hachioji"),
    city("JP", "26", "Kyoto"),
    city("JP", "27", "Osaka"),
    city("JP", "27", "Sakai"),
    city("JP", "01", "Sapporo"),
    city("JP", "01", "Niseko"),
    city("KE", "30", "Nairobi"),
    city("KE", "28", "Mombasa"),
    city("KE", "14", "Malindi"),
    city("KE", "14", "Watamu"),
    city("KE", "22", "Kisumu"),
    city("GB", "ENG", "London"),
    city("GB", "ENG", "Manchester"),
    city("GB", "ENG", "Bath"),
    city("GB", "SCT", "Edinburgh"),
    city("GB", "SCT", "Glasgow"),
    city("GB", "SCT", "Inverness"),
    city("GB", "WLS", "Cardiff"),
    city("GB", "WLS", "Swansea"),
    city("US", "CA", "Los Angeles"),
    city("US", "CA", "San Francisco"),
    city("US", "CA", "San Diego"),
    city("US", "FL", "Miami"),
    city("US", "FL", "Orlando"),
    city("US", "FL", "Key West"),
    city("US", "NY", "New York City"),
    city("US", "NY", "Buffalo"),
    city("US", "WA", "Seattle"),
    city("US", "WA", "Spokane"),
    city("US", "HI", "Honolulu"),
    city("US", "HI", "Lahaina"),
];
