/// how a trip mode contributes to household cost.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ModeCategory {
    /// private vehicle trip. the scale converts person-km into vehicle-km.
    Auto { vkt_scale: f64 },
    /// fare-paying transit trip, free for pass holders
    Transit,
    /// walking or cycling, always free
    Active,
    /// mode code not listed in the cost schedule
    Unrecognized,
}
