use super::graph::Graph;

/// Cities of the built-in demo network.
pub const CITIES: [&str; 11] = [
    "Wien",
    "St. Pölten",
    "Linz",
    "Salzburg",
    "Innsbruck",
    "Bregenz",
    "Graz",
    "Klagenfurt",
    "Villach",
    "Eisenstadt",
    "Hollabrunn",
];

/// Roads as (city, city, km).
pub const ROADS: [(&str, &str, f64); 15] = [
    ("Wien", "St. Pölten", 65.0),
    ("Wien", "Eisenstadt", 60.0),
    ("Wien", "Hollabrunn", 55.0),
    ("Wien", "Graz", 200.0),
    ("Hollabrunn", "St. Pölten", 80.0),
    ("St. Pölten", "Linz", 130.0),
    ("Linz", "Salzburg", 135.0),
    ("Linz", "Graz", 220.0),
    ("Salzburg", "Innsbruck", 185.0),
    ("Salzburg", "Villach", 190.0),
    ("Innsbruck", "Bregenz", 195.0),
    ("Eisenstadt", "Graz", 170.0),
    ("Graz", "Klagenfurt", 140.0),
    ("Klagenfurt", "Villach", 40.0),
    ("Villach", "Innsbruck", 330.0),
];

/// Build the demo road network between Austrian cities.
pub fn road_network() -> Graph {
    let mut graph = Graph::with_capacity(CITIES.len(), ROADS.len());
    for city in CITIES.iter() {
        graph.add_vertex(*city);
    }
    for &(a, b, km) in ROADS.iter() {
        let a = graph.find_vertex(a).expect("road endpoint not in CITIES");
        let b = graph.find_vertex(b).expect("road endpoint not in CITIES");
        graph.add_edge(a, b, km).expect("road endpoint not in CITIES");
    }
    graph
}
