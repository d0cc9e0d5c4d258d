table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        username -> Text,
        email -> Text,
        password -> Text,
        role -> SmallInt,
    }
}

table! {
    places (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        description -> Text,
        category -> Text,
        region -> Text,
        image -> Nullable<Text>,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
    }
}

table! {
    ratings (rowid) {
        rowid -> BigInt,
        id -> Text,
        user_id -> Text,
        place_id -> Text,
        stars -> Double,
        comment -> Nullable<Text>,
        image -> Nullable<Text>,
        // unix timestamp in seconds
        created_at -> BigInt,
    }
}

table! {
    planned_routes (rowid) {
        rowid -> BigInt,
        id -> Text,
        user_id -> Text,
        place_id -> Text,
        // ISO 8601 calendar date (YYYY-MM-DD)
        date -> Text,
    }
}

table! {
    favorites (user_id, place_id) {
        user_id -> Text,
        place_id -> Text,
    }
}

allow_tables_to_appear_in_same_query!(users, places, ratings, planned_routes, favorites);
