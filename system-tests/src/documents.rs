// system-tests/src/documents.rs
// ============================================================================
// Module: GraphQL Documents
// Description: Query and mutation documents sent to the GraphQLZero API.
// Purpose: Keep every wire document in one auditable place.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Documents are sent verbatim. Named operations appear under their name in
//! transcripts and request events; anonymous ones are logged as `anonymous`.
//! Album selections use `user { id }` rather than a `userId` field, which the
//! schema does not expose on `Album`.

// ============================================================================
// SECTION: Users
// ============================================================================

/// Single user with every scalar field.
pub const GET_USER: &str = r"
query GetUser($id: ID!) {
  user(id: $id) {
    id
    name
    username
    email
    phone
    website
  }
}";

/// Single user with owned albums and each album's owner id.
pub const GET_USER_WITH_ALBUMS: &str = r"
query GetUserWithAlbums($id: ID!) {
  user(id: $id) {
    id
    name
    albums {
      data {
        id
        title
        user {
          id
          name
        }
      }
    }
  }
}";

/// Users page with totals.
pub const GET_USERS: &str = r"
query GetUsers($options: PageQueryOptions) {
  users(options: $options) {
    data {
      id
      name
      username
      email
    }
    meta {
      totalCount
    }
  }
}";

/// Users without options.
pub const GET_ALL_USERS: &str = r"
query GetAllUsers {
  users {
    data {
      id
      name
      username
      email
    }
  }
}";

/// User albums by owner id.
pub const GET_USER_ALBUMS: &str = r"
query GetUserAlbums($userId: ID!) {
  user(id: $userId) {
    id
    name
    albums {
      data {
        id
        title
      }
    }
  }
}";

/// Paginated user albums by owner id.
pub const GET_USER_ALBUMS_PAGINATED: &str = r"
query GetUserAlbumsWithPagination($userId: ID!, $options: PageQueryOptions) {
  user(id: $userId) {
    id
    albums(options: $options) {
      data {
        id
        title
      }
      meta {
        totalCount
      }
    }
  }
}";

// ============================================================================
// SECTION: Albums
// ============================================================================

/// Single album with a short owner selection.
pub const GET_ALBUM: &str = r"
query GetAlbum($id: ID!) {
  album(id: $id) {
    id
    title
    user {
      id
      name
      username
    }
  }
}";

/// Single album with the full owner record.
pub const GET_ALBUM_WITH_USER: &str = r"
query GetAlbumWithUser($id: ID!) {
  album(id: $id) {
    id
    title
    user {
      id
      name
      username
      email
      phone
      website
    }
  }
}";

/// Albums page with owner ids and totals.
pub const GET_ALBUMS: &str = r"
query GetAlbums($options: PageQueryOptions) {
  albums(options: $options) {
    data {
      id
      title
      user {
        id
      }
    }
    meta {
      totalCount
    }
  }
}";

/// Albums without options.
pub const GET_ALL_ALBUMS: &str = r"
query GetAllAlbums {
  albums {
    data {
      id
      title
      user {
        id
      }
    }
  }
}";

/// Albums page with owner details.
pub const GET_ALBUMS_WITH_USERS: &str = r"
query GetAlbumsWithUsers($options: PageQueryOptions) {
  albums(options: $options) {
    data {
      id
      title
      user {
        id
        name
        username
      }
    }
  }
}";

/// Album, its owner, and the owner's albums.
pub const GET_COMPLEX_ALBUM: &str = r"
query GetComplexAlbumData($id: ID!) {
  album(id: $id) {
    id
    title
    user {
      id
      name
      username
      albums {
        data {
          id
          title
        }
      }
    }
  }
}";

/// Album with owner cross-links for consistency checks.
pub const GET_ALBUM_CROSS_LINKS: &str = r"
query GetAlbumCrossLinks($id: ID!) {
  album(id: $id) {
    id
    title
    user {
      id
      username
      albums {
        data {
          id
          title
        }
      }
    }
  }
}";

/// Three aliased album lookups in one request; the third id does not exist.
pub const GET_MULTIPLE_ALBUMS: &str = r#"
query GetMultipleAlbums {
  album1: album(id: "1") {
    id
    title
  }
  album2: album(id: "2") {
    id
    title
  }
  album3: album(id: "999999") {
    id
    title
  }
}"#;

/// Album lookup selecting a field the schema does not define.
pub const GET_ALBUM_UNKNOWN_FIELD: &str = r"
query GetAlbum($id: ID!) {
  album(id: $id) {
    id
    title
    nonExistentField
  }
}";

// ============================================================================
// SECTION: Combined And Anonymous Reads
// ============================================================================

/// Users and albums pages in a single request.
pub const GET_COMPLEX_DATA: &str = r"
query GetComplexData {
  users(options: { paginate: { page: 1, limit: 3 } }) {
    data {
      id
      name
      username
      email
      albums { data { id title user { id } } }
    }
    meta { totalCount }
  }
  albums(options: { paginate: { page: 1, limit: 5 } }) {
    data { id title user { id name username } }
    meta { totalCount }
  }
}";

/// Every user with every album, each with its owner id.
pub const GET_USERS_DEEP: &str = r"
query {
  users {
    data {
      id
      name
      username
      email
      phone
      website
      albums {
        data {
          id
          title
          user { id }
        }
      }
    }
  }
}";

/// Seeded user `1`, anonymous.
pub const USER_ONE: &str = r#"query { user(id: "1") { id name } }"#;
/// Seeded user `2`, anonymous.
pub const USER_TWO: &str = r#"query { user(id: "2") { id name } }"#;
/// Seeded user `1` with email, anonymous.
pub const USER_ONE_EMAIL: &str = r#"query { user(id: "1") { id email } }"#;
/// First three albums, anonymous.
pub const ALBUMS_LIMIT_THREE: &str =
    r"query { albums(options: { paginate: { limit: 3 } }) { data { id title user { id } } } }";
/// First three users, anonymous.
pub const USERS_LIMIT_THREE: &str =
    r"query { users(options: { paginate: { limit: 3 } }) { data { id name } } }";
/// Every album, anonymous.
pub const ALL_ALBUMS: &str = r"query { albums { data { id title user { id } } } }";

// ============================================================================
// SECTION: Invalid Documents
// ============================================================================

/// Declares a required variable that the caller never supplies.
pub const GET_USER_UNSUPPLIED_VARIABLE: &str = r"
query GetUser($id: ID!, $required: String!) {
  user(id: $id) {
    id
    name
  }
}";

/// Selects a root field the schema does not define.
pub const INVALID_ROOT_FIELD: &str = r"query { invalidField }";

// ============================================================================
// SECTION: Mutations
// ============================================================================

/// Create a user.
pub const CREATE_USER: &str = r"
mutation CreateUser($input: CreateUserInput!) {
  createUser(input: $input) {
    id
    name
    username
    email
    phone
    website
  }
}";

/// Update a user.
pub const UPDATE_USER: &str = r"
mutation UpdateUser($id: ID!, $input: UpdateUserInput!) {
  updateUser(id: $id, input: $input) {
    id
    name
    username
    email
    phone
    website
  }
}";

/// Delete a user.
pub const DELETE_USER: &str = r"
mutation DeleteUser($id: ID!) {
  deleteUser(id: $id)
}";

/// Create an album.
pub const CREATE_ALBUM: &str = r"
mutation CreateAlbum($input: CreateAlbumInput!) {
  createAlbum(input: $input) {
    id
    title
    user {
      id
    }
  }
}";

/// Update an album.
pub const UPDATE_ALBUM: &str = r"
mutation UpdateAlbum($id: ID!, $input: UpdateAlbumInput!) {
  updateAlbum(id: $id, input: $input) {
    id
    title
    user {
      id
    }
  }
}";

/// Delete an album.
pub const DELETE_ALBUM: &str = r"
mutation DeleteAlbum($id: ID!) {
  deleteAlbum(id: $id)
}";

// ============================================================================
// SECTION: Tests
// ============================================================================
