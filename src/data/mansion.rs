//! The mansion map
//!
//! A fixed binary tree of rooms. Every room may hold one clue and lead to at
//! most two further rooms.

use crate::QuestError;
use serde::{Deserialize, Serialize};

/// Stable handle to a room in a [`Mansion`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(usize);

/// Which way to leave a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The menu key for this direction (`e`squerda / `d`ireita)
    pub fn key(&self) -> char {
        match self {
            Side::Left => 'e',
            Side::Right => 'd',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A single room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub clue: Option<String>,
    pub left: Option<RoomId>,
    pub right: Option<RoomId>,
}

impl Room {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            clue: None,
            left: None,
            right: None,
        }
    }

    pub fn exit(&self, side: Side) -> Option<RoomId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// True when the room has no way further in
    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// The whole house, stored as an arena of rooms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mansion {
    rooms: Vec<Room>,
    entrance: RoomId,
}

impl Mansion {
    /// The demo mansion
    pub fn fixture() -> Self {
        let mut builder = MansionBuilder::new("Hall de Entrada");
        let hall = builder.entrance();

        let biblioteca = builder.attach(hall, Side::Left, "Biblioteca");
        let sala = builder.attach(hall, Side::Right, "Sala de Estar");

        let banheiro = builder.attach(biblioteca, Side::Left, "Banheiro");
        let quarto = builder.attach(biblioteca, Side::Right, "Quarto Principal");
        let cozinha = builder.attach(sala, Side::Left, "Cozinha");

        let escritorio = builder.attach(quarto, Side::Right, "Escritório");
        let servico = builder.attach(cozinha, Side::Right, "Área de Serviço");

        builder.place_clue(biblioteca, "Diário faltando páginas.");
        builder.place_clue(cozinha, "Faca com manchas de sangue.");
        builder.place_clue(quarto, "Telefone quebrado.");
        builder.place_clue(banheiro, "Toalha molhada.");
        builder.place_clue(servico, "Garrafas de produtos de limpeza abertas.");
        builder.place_clue(escritorio, "Bilhete encontrado: 'Libro azul na estante.'");

        builder.build()
    }

    pub fn entrance(&self) -> RoomId {
        self.entrance
    }

    pub fn room(&self, id: RoomId) -> Result<&Room, QuestError> {
        self.rooms.get(id.0).ok_or(QuestError::UnknownRoom(id.0))
    }

    /// Where `side` leads from `id`, if anywhere
    pub fn exit(&self, id: RoomId, side: Side) -> Result<Option<RoomId>, QuestError> {
        Ok(self.room(id)?.exit(side))
    }

    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, room)| (RoomId(i), room))
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// How many rooms hold a clue
    pub fn clue_count(&self) -> usize {
        self.rooms.iter().filter(|room| room.clue.is_some()).count()
    }
}

/// Assembles the fixture without handing out dangling handles
struct MansionBuilder {
    rooms: Vec<Room>,
}

impl MansionBuilder {
    fn new(entrance: &str) -> Self {
        Self {
            rooms: vec![Room::new(entrance)],
        }
    }

    fn entrance(&self) -> RoomId {
        RoomId(0)
    }

    fn attach(&mut self, parent: RoomId, side: Side, name: &str) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room::new(name));
        let parent = &mut self.rooms[parent.0];
        match side {
            Side::Left => parent.left = Some(id),
            Side::Right => parent.right = Some(id),
        }
        id
    }

    fn place_clue(&mut self, room: RoomId, clue: &str) {
        self.rooms[room.0].clue = Some(clue.to_string());
    }

    fn build(self) -> Mansion {
        Mansion {
            rooms: self.rooms,
            entrance: RoomId(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(mansion: &'a Mansion, name: &str) -> (RoomId, &'a Room) {
        mansion
            .rooms()
            .find(|(_, room)| room.name == name)
            .unwrap_or_else(|| panic!("no room named {name}"))
    }

    #[test]
    fn fixture_layout() {
        let mansion = Mansion::fixture();
        assert_eq!(mansion.len(), 8);
        assert_eq!(mansion.clue_count(), 6);

        let hall = mansion.room(mansion.entrance()).unwrap();
        assert_eq!(hall.name, "Hall de Entrada");
        assert!(hall.clue.is_none());

        let (sala, sala_room) = find(&mansion, "Sala de Estar");
        assert!(sala_room.right.is_none());
        let cozinha = mansion.exit(sala, Side::Left).unwrap().unwrap();
        assert_eq!(
            mansion.room(cozinha).unwrap().clue.as_deref(),
            Some("Faca com manchas de sangue.")
        );
    }

    #[test]
    fn leaves_are_dead_ends() {
        let mansion = Mansion::fixture();
        let dead_ends: Vec<&str> = mansion
            .rooms()
            .filter(|(_, room)| room.is_dead_end())
            .map(|(_, room)| room.name.as_str())
            .collect();
        assert_eq!(dead_ends, vec!["Banheiro", "Escritório", "Área de Serviço"]);
    }

    #[test]
    fn unknown_room_is_an_error() {
        let mansion = Mansion::fixture();
        assert!(matches!(
            mansion.room(RoomId(99)),
            Err(QuestError::UnknownRoom(99))
        ));
    }
}
