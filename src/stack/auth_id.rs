crate::define_id_enum! {
    /// Authentication solution identifier
    AuthId {
        NextAuth => "next-auth" : "NextAuth.js",
        Clerk => "clerk" : "Clerk",
        SupabaseAuth => "supabase-auth" : "Supabase Auth",
        Passport => "passport" : "Passport.js",
        FirebaseAuth => "firebase-auth" : "Firebase Auth",
        Auth0 => "auth0" : "Auth0",
    }
}
