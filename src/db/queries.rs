use chrono::{NaiveDate, NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use crate::models::{Appointment, AppointmentStatus, ContactMessage, Post, StaffUser};

// ── Appointments ──

pub fn create_appointment(conn: &Connection, appointment: &Appointment) -> anyhow::Result<()> {
    let date = appointment.appointment_date.format("%Y-%m-%d").to_string();
    let created_at = appointment.created_at.format("%Y-%m-%d %H:%M:%S").to_string();
    let updated_at = appointment.updated_at.format("%Y-%m-%d %H:%M:%S").to_string();

    conn.execute(
        "INSERT INTO appointments (id, client_name, client_email, client_phone, service, appointment_date, appointment_time, message, status, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            appointment.id,
            appointment.client_name,
            appointment.client_email,
            appointment.client_phone,
            appointment.service,
            date,
            appointment.appointment_time,
            appointment.message,
            appointment.status.as_str(),
            created_at,
            updated_at,
        ],
    )?;
    Ok(())
}

pub fn get_appointments(
    conn: &Connection,
    status_filter: Option<&str>,
    limit: i64,
) -> anyhow::Result<Vec<Appointment>> {
    let (sql, params_vec): (String, Vec<Box<dyn rusqlite::types::ToSql>>) = match status_filter {
        Some(status) => (
            "SELECT id, client_name, client_email, client_phone, service, appointment_date, appointment_time, message, status, created_at, updated_at \
             FROM appointments WHERE status = ?1 ORDER BY appointment_date DESC, appointment_time DESC LIMIT ?2"
                .to_string(),
            vec![
                Box::new(status.to_string()) as Box<dyn rusqlite::types::ToSql>,
                Box::new(limit),
            ],
        ),
        None => (
            "SELECT id, client_name, client_email, client_phone, service, appointment_date, appointment_time, message, status, created_at, updated_at \
             FROM appointments ORDER BY appointment_date DESC, appointment_time DESC LIMIT ?1"
                .to_string(),
            vec![Box::new(limit) as Box<dyn rusqlite::types::ToSql>],
        ),
    };

    let mut stmt = conn.prepare(&sql)?;
    let params_refs: Vec<&dyn rusqlite::types::ToSql> = params_vec.iter().map(|p| p.as_ref()).collect();
    let rows = stmt.query_map(params_refs.as_slice(), |row| Ok(parse_appointment_row(row)))?;

    let mut appointments = vec![];
    for row in rows {
        appointments.push(row??);
    }
    Ok(appointments)
}

pub fn get_appointment_by_id(conn: &Connection, id: &str) -> anyhow::Result<Option<Appointment>> {
    let result = conn.query_row(
        "SELECT id, client_name, client_email, client_phone, service, appointment_date, appointment_time, message, status, created_at, updated_at \
         FROM appointments WHERE id = ?1",
        params![id],
        |row| Ok(parse_appointment_row(row)),
    );

    match result {
        Ok(appointment) => Ok(Some(appointment?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn update_appointment_status(
    conn: &Connection,
    id: &str,
    status: &AppointmentStatus,
) -> anyhow::Result<bool> {
    let now = Utc::now()
        .naive_utc()
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();
    let count = conn.execute(
        "UPDATE appointments SET status = ?1, updated_at = ?2 WHERE id = ?3",
        params![status.as_str(), now, id],
    )?;
    Ok(count > 0)
}

fn parse_appointment_row(row: &rusqlite::Row) -> anyhow::Result<Appointment> {
    let id: String = row.get(0)?;
    let client_name: String = row.get(1)?;
    let client_email: String = row.get(2)?;
    let client_phone: String = row.get(3)?;
    let service: String = row.get(4)?;
    let date_str: String = row.get(5)?;
    let appointment_time: String = row.get(6)?;
    let message: String = row.get(7)?;
    let status_str: String = row.get(8)?;
    let created_at_str: String = row.get(9)?;
    let updated_at_str: String = row.get(10)?;

    let appointment_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .unwrap_or_else(|_| Utc::now().date_naive());
    let created_at = NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| Utc::now().naive_utc());
    let updated_at = NaiveDateTime::parse_from_str(&updated_at_str, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| Utc::now().naive_utc());

    Ok(Appointment {
        id,
        client_name,
        client_email,
        client_phone,
        service,
        appointment_date,
        appointment_time,
        message,
        status: AppointmentStatus::parse(&status_str),
        created_at,
        updated_at,
    })
}

// ── Messages ──

pub fn create_message(conn: &Connection, message: &ContactMessage) -> anyhow::Result<()> {
    let created_at = message.created_at.format("%Y-%m-%d %H:%M:%S").to_string();

    conn.execute(
        "INSERT INTO messages (id, name, email, phone, subject, body, is_read, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            message.id,
            message.name,
            message.email,
            message.phone,
            message.subject,
            message.body,
            message.is_read as i32,
            created_at,
        ],
    )?;
    Ok(())
}

pub fn get_messages(
    conn: &Connection,
    unread_only: bool,
    limit: i64,
) -> anyhow::Result<Vec<ContactMessage>> {
    let sql = if unread_only {
        "SELECT id, name, email, phone, subject, body, is_read, created_at \
         FROM messages WHERE is_read = 0 ORDER BY created_at DESC LIMIT ?1"
    } else {
        "SELECT id, name, email, phone, subject, body, is_read, created_at \
         FROM messages ORDER BY created_at DESC LIMIT ?1"
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params![limit], |row| Ok(parse_message_row(row)))?;

    let mut messages = vec![];
    for row in rows {
        messages.push(row??);
    }
    Ok(messages)
}

pub fn mark_message_read(conn: &Connection, id: &str) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE messages SET is_read = 1 WHERE id = ?1",
        params![id],
    )?;
    Ok(count > 0)
}

pub fn delete_message(conn: &Connection, id: &str) -> anyhow::Result<bool> {
    let count = conn.execute("DELETE FROM messages WHERE id = ?1", params![id])?;
    Ok(count > 0)
}

fn parse_message_row(row: &rusqlite::Row) -> anyhow::Result<ContactMessage> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let email: String = row.get(2)?;
    let phone: Option<String> = row.get(3)?;
    let subject: Option<String> = row.get(4)?;
    let body: String = row.get(5)?;
    let is_read: bool = row.get::<_, i32>(6)? != 0;
    let created_at_str: String = row.get(7)?;

    let created_at = NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| Utc::now().naive_utc());

    Ok(ContactMessage {
        id,
        name,
        email,
        phone,
        subject,
        body,
        is_read,
        created_at,
    })
}

// ── Posts ──

pub fn create_post(conn: &Connection, post: &Post) -> anyhow::Result<()> {
    let created_at = post.created_at.format("%Y-%m-%d %H:%M:%S").to_string();
    let updated_at = post.updated_at.format("%Y-%m-%d %H:%M:%S").to_string();

    conn.execute(
        "INSERT INTO posts (id, slug, title, summary, body, author, published, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            post.id,
            post.slug,
            post.title,
            post.summary,
            post.body,
            post.author,
            post.published as i32,
            created_at,
            updated_at,
        ],
    )?;
    Ok(())
}

pub fn get_posts(conn: &Connection, published_only: bool, limit: i64) -> anyhow::Result<Vec<Post>> {
    let sql = if published_only {
        "SELECT id, slug, title, summary, body, author, published, created_at, updated_at \
         FROM posts WHERE published = 1 ORDER BY created_at DESC LIMIT ?1"
    } else {
        "SELECT id, slug, title, summary, body, author, published, created_at, updated_at \
         FROM posts ORDER BY created_at DESC LIMIT ?1"
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params![limit], |row| Ok(parse_post_row(row)))?;

    let mut posts = vec![];
    for row in rows {
        posts.push(row??);
    }
    Ok(posts)
}

pub fn get_post_by_id(conn: &Connection, id: &str) -> anyhow::Result<Option<Post>> {
    let result = conn.query_row(
        "SELECT id, slug, title, summary, body, author, published, created_at, updated_at \
         FROM posts WHERE id = ?1",
        params![id],
        |row| Ok(parse_post_row(row)),
    );

    match result {
        Ok(post) => Ok(Some(post?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn get_post_by_slug(conn: &Connection, slug: &str) -> anyhow::Result<Option<Post>> {
    let result = conn.query_row(
        "SELECT id, slug, title, summary, body, author, published, created_at, updated_at \
         FROM posts WHERE slug = ?1",
        params![slug],
        |row| Ok(parse_post_row(row)),
    );

    match result {
        Ok(post) => Ok(Some(post?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn update_post(conn: &Connection, post: &Post) -> anyhow::Result<bool> {
    let updated_at = post.updated_at.format("%Y-%m-%d %H:%M:%S").to_string();

    let count = conn.execute(
        "UPDATE posts SET slug = ?1, title = ?2, summary = ?3, body = ?4, author = ?5, published = ?6, updated_at = ?7
         WHERE id = ?8",
        params![
            post.slug,
            post.title,
            post.summary,
            post.body,
            post.author,
            post.published as i32,
            updated_at,
            post.id,
        ],
    )?;
    Ok(count > 0)
}

pub fn delete_post(conn: &Connection, id: &str) -> anyhow::Result<bool> {
    let count = conn.execute("DELETE FROM posts WHERE id = ?1", params![id])?;
    Ok(count > 0)
}

fn parse_post_row(row: &rusqlite::Row) -> anyhow::Result<Post> {
    let id: String = row.get(0)?;
    let slug: String = row.get(1)?;
    let title: String = row.get(2)?;
    let summary: Option<String> = row.get(3)?;
    let body: String = row.get(4)?;
    let author: String = row.get(5)?;
    let published: bool = row.get::<_, i32>(6)? != 0;
    let created_at_str: String = row.get(7)?;
    let updated_at_str: String = row.get(8)?;

    let created_at = NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| Utc::now().naive_utc());
    let updated_at = NaiveDateTime::parse_from_str(&updated_at_str, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| Utc::now().naive_utc());

    Ok(Post {
        id,
        slug,
        title,
        summary,
        body,
        author,
        published,
        created_at,
        updated_at,
    })
}

// ── Users ──

pub fn create_user(conn: &Connection, user: &StaffUser) -> anyhow::Result<()> {
    let created_at = user.created_at.format("%Y-%m-%d %H:%M:%S").to_string();

    conn.execute(
        "INSERT INTO users (id, username, display_name, email, role, active, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            user.id,
            user.username,
            user.display_name,
            user.email,
            user.role,
            user.active as i32,
            created_at,
        ],
    )?;
    Ok(())
}

pub fn get_users(conn: &Connection, limit: i64) -> anyhow::Result<Vec<StaffUser>> {
    let mut stmt = conn.prepare(
        "SELECT id, username, display_name, email, role, active, created_at \
         FROM users ORDER BY username ASC LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit], |row| Ok(parse_user_row(row)))?;

    let mut users = vec![];
    for row in rows {
        users.push(row??);
    }
    Ok(users)
}

pub fn get_user_by_id(conn: &Connection, id: &str) -> anyhow::Result<Option<StaffUser>> {
    let result = conn.query_row(
        "SELECT id, username, display_name, email, role, active, created_at \
         FROM users WHERE id = ?1",
        params![id],
        |row| Ok(parse_user_row(row)),
    );

    match result {
        Ok(user) => Ok(Some(user?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn get_user_by_username(conn: &Connection, username: &str) -> anyhow::Result<Option<StaffUser>> {
    let result = conn.query_row(
        "SELECT id, username, display_name, email, role, active, created_at \
         FROM users WHERE username = ?1",
        params![username],
        |row| Ok(parse_user_row(row)),
    );

    match result {
        Ok(user) => Ok(Some(user?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn update_user(conn: &Connection, user: &StaffUser) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE users SET display_name = ?1, email = ?2, role = ?3, active = ?4 WHERE id = ?5",
        params![
            user.display_name,
            user.email,
            user.role,
            user.active as i32,
            user.id,
        ],
    )?;
    Ok(count > 0)
}

pub fn delete_user(conn: &Connection, id: &str) -> anyhow::Result<bool> {
    let count = conn.execute("DELETE FROM users WHERE id = ?1", params![id])?;
    Ok(count > 0)
}

fn parse_user_row(row: &rusqlite::Row) -> anyhow::Result<StaffUser> {
    let id: String = row.get(0)?;
    let username: String = row.get(1)?;
    let display_name: String = row.get(2)?;
    let email: String = row.get(3)?;
    let role: String = row.get(4)?;
    let active: bool = row.get::<_, i32>(5)? != 0;
    let created_at_str: String = row.get(6)?;

    let created_at = NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| Utc::now().naive_utc());

    Ok(StaffUser {
        id,
        username,
        display_name,
        email,
        role,
        active,
        created_at,
    })
}

// ── Dashboard ──

pub struct DashboardStats {
    pub pending_appointments: i64,
    pub unread_messages: i64,
    pub published_posts: i64,
    pub active_users: i64,
}

pub fn get_dashboard_stats(conn: &Connection) -> anyhow::Result<DashboardStats> {
    let pending_appointments: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM appointments WHERE status = 'pending'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    let unread_messages: i64 = conn
        .query_row("SELECT COUNT(*) FROM messages WHERE is_read = 0", [], |row| row.get(0))
        .unwrap_or(0);

    let published_posts: i64 = conn
        .query_row("SELECT COUNT(*) FROM posts WHERE published = 1", [], |row| row.get(0))
        .unwrap_or(0);

    let active_users: i64 = conn
        .query_row("SELECT COUNT(*) FROM users WHERE active = 1", [], |row| row.get(0))
        .unwrap_or(0);

    Ok(DashboardStats {
        pending_appointments,
        unread_messages,
        published_posts,
        active_users,
    })
}
