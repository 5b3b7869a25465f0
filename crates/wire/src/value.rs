// Copyright (c) lattica.dev 2025
// This file is licensed under the MIT, see license.md file

use std::collections::BTreeMap;

use lattica_type::{
    DataSet, Date, DateTime, Edge, List, Map, NullKind, Path, Set, Step, Tag, Time, Type, Value,
    Vertex,
};

use crate::reader::Reader;
use crate::writer::Writer;
use crate::{Result, invalid_data};

/// Encodes a value as `[type code][payload]`.
pub fn encode_value(value: &Value) -> Vec<u8> {
    let mut writer = Writer::new();
    write_value(&mut writer, value);
    writer.into_bytes()
}

/// Decodes a single value, requiring the buffer to be fully consumed.
pub fn decode_value(bytes: &[u8]) -> Result<Value> {
    let mut reader = Reader::new(bytes);
    let value = read_value(&mut reader)?;
    if !reader.is_exhausted() {
        return invalid_data!("{} trailing bytes after value", reader.remaining());
    }
    Ok(value)
}

pub(crate) fn write_value(w: &mut Writer, value: &Value) {
    w.write_u8(value.get_type().code());
    match value {
        Value::Empty => {}
        Value::Null(kind) => w.write_u8(kind.code()),
        Value::Boolean(v) => w.write_bool(*v),
        Value::Int8(v) => w.write_i64(*v),
        Value::Float8(v) => w.write_f64(v.value()),
        Value::Utf8(v) => w.write_str(v),
        Value::Date(v) => write_date(w, v),
        Value::Time(v) => write_time(w, v),
        Value::DateTime(v) => {
            write_date(w, &v.date);
            write_time(w, &v.time);
        }
        Value::List(v) => {
            w.write_u32(v.len() as u32);
            for item in v.iter() {
                write_value(w, item);
            }
        }
        Value::Map(v) => write_props(w, &v.kvs),
        Value::Set(v) => {
            w.write_u32(v.len() as u32);
            for item in v.iter() {
                write_value(w, item);
            }
        }
        Value::DataSet(v) => {
            w.write_u32(v.columns.len() as u32);
            for column in &v.columns {
                w.write_str(column);
            }
            w.write_u32(v.rows.len() as u32);
            for row in &v.rows {
                w.write_u32(row.len() as u32);
                for cell in row {
                    write_value(w, cell);
                }
            }
        }
        Value::Vertex(v) => write_vertex(w, v),
        Value::Edge(v) => {
            write_value(w, &v.src);
            write_value(w, &v.dst);
            w.write_str(&v.name);
            w.write_i64(v.rank);
            write_props(w, &v.props);
        }
        Value::Path(v) => {
            write_vertex(w, &v.src);
            w.write_u32(v.steps.len() as u32);
            for step in &v.steps {
                write_vertex(w, &step.dst);
                w.write_str(&step.name);
                w.write_i64(step.rank);
                write_props(w, &step.props);
            }
        }
    }
}

pub(crate) fn read_value(r: &mut Reader<'_>) -> Result<Value> {
    let code = r.read_u8()?;
    let Some(ty) = Type::from_code(code) else {
        // Only trusted, previously-encoded streams reach the decoder; an
        // unassigned type byte means the stream is corrupt.
        panic!("unknown value type byte {:#04x}", code);
    };
    Ok(match ty {
        Type::Empty => Value::Empty,
        Type::Null => {
            let kind = r.read_u8()?;
            let Some(kind) = NullKind::from_code(kind) else {
                panic!("unknown null subkind byte {:#04x}", kind);
            };
            Value::Null(kind)
        }
        Type::Boolean => Value::Boolean(r.read_bool()?),
        Type::Int8 => Value::Int8(r.read_i64()?),
        Type::Float8 => {
            let v = r.read_f64()?;
            if v.is_nan() {
                return invalid_data!("NaN float payload");
            }
            Value::float8(v)
        }
        Type::Utf8 => Value::Utf8(r.read_str()?),
        Type::Date => Value::Date(read_date(r)?),
        Type::Time => Value::Time(read_time(r)?),
        Type::DateTime => Value::DateTime(DateTime::new(read_date(r)?, read_time(r)?)),
        Type::List => {
            let len = r.read_u32()? as usize;
            let mut values = Vec::with_capacity(len.min(r.remaining()));
            for _ in 0..len {
                values.push(read_value(r)?);
            }
            Value::List(List::new(values))
        }
        Type::Map => Value::Map(Map::new(read_props(r)?)),
        Type::Set => {
            let len = r.read_u32()? as usize;
            let mut values = std::collections::BTreeSet::new();
            for _ in 0..len {
                values.insert(read_value(r)?);
            }
            Value::Set(Set::new(values))
        }
        Type::DataSet => {
            let column_count = r.read_u32()? as usize;
            let mut columns = Vec::with_capacity(column_count.min(r.remaining()));
            for _ in 0..column_count {
                columns.push(r.read_str()?);
            }
            let row_count = r.read_u32()? as usize;
            let mut rows = Vec::with_capacity(row_count.min(r.remaining()));
            for _ in 0..row_count {
                let cell_count = r.read_u32()? as usize;
                let mut row = Vec::with_capacity(cell_count.min(r.remaining()));
                for _ in 0..cell_count {
                    row.push(read_value(r)?);
                }
                rows.push(row);
            }
            Value::DataSet(DataSet::new(columns, rows))
        }
        Type::Vertex => Value::Vertex(read_vertex(r)?),
        Type::Edge => {
            let src = read_value(r)?;
            let dst = read_value(r)?;
            let name = r.read_str()?;
            let rank = r.read_i64()?;
            let props = read_props(r)?;
            Value::Edge(Edge::new(src, dst, name, rank, props))
        }
        Type::Path => {
            let src = read_vertex(r)?;
            let step_count = r.read_u32()? as usize;
            let mut steps = Vec::with_capacity(step_count.min(r.remaining()));
            for _ in 0..step_count {
                let dst = read_vertex(r)?;
                let name = r.read_str()?;
                let rank = r.read_i64()?;
                let props = read_props(r)?;
                steps.push(Step::new(dst, name, rank, props));
            }
            Value::Path(Path::new(src, steps))
        }
    })
}

fn write_date(w: &mut Writer, date: &Date) {
    w.write_i16(date.year);
    w.write_u8(date.month);
    w.write_u8(date.day);
}

fn read_date(r: &mut Reader<'_>) -> Result<Date> {
    let year = r.read_i16()?;
    let month = r.read_u8()?;
    let day = r.read_u8()?;
    Ok(Date { year, month, day })
}

fn write_time(w: &mut Writer, time: &Time) {
    w.write_u8(time.hour);
    w.write_u8(time.minute);
    w.write_u8(time.sec);
    w.write_u32(time.microsec);
}

fn read_time(r: &mut Reader<'_>) -> Result<Time> {
    let hour = r.read_u8()?;
    let minute = r.read_u8()?;
    let sec = r.read_u8()?;
    let microsec = r.read_u32()?;
    Ok(Time { hour, minute, sec, microsec })
}

fn write_props(w: &mut Writer, props: &BTreeMap<String, Value>) {
    w.write_u32(props.len() as u32);
    for (key, value) in props {
        w.write_str(key);
        write_value(w, value);
    }
}

fn read_props(r: &mut Reader<'_>) -> Result<BTreeMap<String, Value>> {
    let len = r.read_u32()? as usize;
    let mut props = BTreeMap::new();
    for _ in 0..len {
        let key = r.read_str()?;
        let value = read_value(r)?;
        props.insert(key, value);
    }
    Ok(props)
}

fn write_vertex(w: &mut Writer, vertex: &Vertex) {
    write_value(w, &vertex.vid);
    w.write_u32(vertex.tags.len() as u32);
    for tag in &vertex.tags {
        w.write_str(&tag.name);
        write_props(w, &tag.props);
    }
}

fn read_vertex(r: &mut Reader<'_>) -> Result<Vertex> {
    let vid = read_value(r)?;
    let tag_count = r.read_u32()? as usize;
    let mut tags = Vec::with_capacity(tag_count.min(r.remaining()));
    for _ in 0..tag_count {
        let name = r.read_str()?;
        let props = read_props(r)?;
        tags.push(Tag::new(name, props));
    }
    Ok(Vertex::new(vid, tags))
}
