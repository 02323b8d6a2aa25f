//! Fixed codec tables for the two serialization contexts.
use indexmap::IndexMap;
use once_cell::sync::Lazy;

pub const CODEC: &str = "com.mojang.serialization.Codec";
pub const RECORD_CODEC_BUILDER: &str = "com.mojang.serialization.codecs.RecordCodecBuilder";
pub const BYTE_BUF_CODECS: &str = "net.minecraft.network.codec.ByteBufCodecs";
pub const STREAM_CODEC: &str = "net.minecraft.network.codec.StreamCodec";
pub const BYTE_BUF: &str = "io.netty.buffer.ByteBuf";
pub const STRING_REPRESENTABLE: &str = "net.minecraft.util.StringRepresentable";
pub const NOT_NULL: &str = "org.jetbrains.annotations.NotNull";

pub const CODEC_FIELD: &str = "CODEC";
pub const STREAM_CODEC_FIELD: &str = "STREAM_CODEC";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecContext {
    /// Structural codecs (`Codec`).
    Value,
    /// Binary network codecs (`StreamCodec`).
    Wire,
}

static VALUE_TABLE: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        ("java.lang.Boolean", "BOOL"),
        ("java.lang.Byte", "BYTE"),
        ("java.lang.Short", "SHORT"),
        ("java.lang.Integer", "INT"),
        ("java.lang.Long", "LONG"),
        ("java.lang.Float", "FLOAT"),
        ("java.lang.Double", "DOUBLE"),
        ("java.lang.String", "STRING"),
        ("java.nio.ByteBuffer", "BYTE_BUFFER"),
        ("java.util.stream.IntStream", "INT_STREAM"),
        ("java.util.stream.LongStream", "LONG_STREAM"),
        ("boolean", "BOOL"),
        ("byte", "BYTE"),
        ("short", "SHORT"),
        ("int", "INT"),
        ("long", "LONG"),
        ("float", "FLOAT"),
        ("double", "DOUBLE"),
    ])
});

static WIRE_TABLE: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        ("java.lang.Boolean", "BOOL"),
        ("java.lang.Byte", "BYTE"),
        ("java.lang.Short", "SHORT"),
        ("java.lang.Integer", "VAR_INT"),
        ("java.lang.Long", "VAR_LONG"),
        ("java.lang.Float", "FLOAT"),
        ("java.lang.Double", "DOUBLE"),
        ("java.lang.String", "STRING_UTF8"),
        ("net.minecraft.nbt.Tag", "TAG"),
        ("net.minecraft.nbt.CompoundTag", "COMPOUND_TAG"),
        ("org.joml.Vector3f", "VECTOR3F"),
        ("org.joml.Quaternionf", "QUATERNIONF"),
        ("com.mojang.authlib.properties.PropertyMap", "GAME_PROFILE_PROPERTIES"),
        ("com.mojang.authlib.GameProfile", "GAME_PROFILE"),
        ("byte[]", "BYTE_ARRAY"),
        ("boolean", "BOOL"),
        ("byte", "BYTE"),
        ("short", "SHORT"),
        ("int", "VAR_INT"),
        ("long", "VAR_LONG"),
        ("float", "FLOAT"),
        ("double", "DOUBLE"),
    ])
});

impl CodecContext {
    /// Class holding the prebuilt primitive codecs.
    pub fn namespace(self) -> &'static str {
        match self {
            CodecContext::Value => CODEC,
            CodecContext::Wire => BYTE_BUF_CODECS,
        }
    }

    /// Static member every composed type is assumed to expose.
    pub fn member(self) -> &'static str {
        match self {
            CodecContext::Value => CODEC_FIELD,
            CodecContext::Wire => STREAM_CODEC_FIELD,
        }
    }

    pub fn table(self) -> &'static IndexMap<&'static str, &'static str> {
        match self {
            CodecContext::Value => &VALUE_TABLE,
            CodecContext::Wire => &WIRE_TABLE,
        }
    }

    pub fn token(self, type_name: &str) -> Option<&'static str> {
        self.table().get(type_name).copied()
    }
}
