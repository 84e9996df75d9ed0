crate::define_id_enum! {
    /// Database or ORM identifier
    DatabaseId {
        Prisma => "prisma" : "Prisma",
        Mongoose => "mongoose" : "Mongoose",
        Drizzle => "drizzle" : "Drizzle",
        Sequelize => "sequelize" : "Sequelize",
        Typeorm => "typeorm" : "TypeORM",
        Supabase => "supabase" : "Supabase",
        Firebase => "firebase" : "Firebase",
        Postgresql => "postgresql" : "PostgreSQL",
        Mysql => "mysql" : "MySQL",
    }
}
